use std::path::Path;

use console::Style;
use cropper_core::crop::{crop_region, display_dimensions};
use cropper_core::cropper::ImageCropper;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

/// Source, viewport and zoom range of a loaded session.
pub fn print_session_summary(input: &Path, session: &ImageCropper) {
    let s = Styles::new();
    print_title(&s, "Image Cropper");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    if let Some(src) = session.source_image() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Dimensions"),
            s.value.apply_to(format!("{}x{}", src.width(), src.height()))
        );
    }
    println!();

    let vp = session.viewport();
    println!("  {}", s.header.apply_to("Viewport"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", vp.width, vp.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Anchor"),
        s.value.apply_to(format!("({}, {})", vp.anchor.x, vp.anchor.y))
    );
    println!();

    let range = session.scale_range();
    println!("  {}", s.header.apply_to("Zoom Range"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Base"),
        s.value.apply_to(format!(
            "{:.1}x{:.1}",
            range.base_size.x, range.base_size.y
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max"),
        s.value.apply_to(format!(
            "{:.1}x{:.1}",
            range.max_size.x, range.max_size.y
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Resizer"),
        s.value.apply_to(session.resizer_name())
    );
    println!();
}

/// Where the crop was read from and where it went.
pub fn print_crop_result(session: &ImageCropper, output: &Path) {
    let s = Styles::new();
    print_title(&s, "Crop");

    let placement = session.placement();
    let (display_w, display_h) = display_dimensions(session.controller());
    let region = crop_region(session.controller());

    println!(
        "  {:<14}{}",
        s.label.apply_to("Displayed"),
        s.value.apply_to(format!("{display_w}x{display_h}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Position"),
        s.value.apply_to(format!(
            "({:.2}, {:.2})",
            placement.position.x, placement.position.y
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Region"),
        s.value.apply_to(format!(
            "{}x{} at ({}, {})",
            region.width, region.height, region.x, region.y
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}
