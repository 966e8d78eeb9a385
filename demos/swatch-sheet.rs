use recipe_palette::pagesize::{self, PageOrientation};
use recipe_palette::palette::BASE;
use recipe_palette::{In, Interpolation, Palette, SwatchSheet};

/// Usage: swatch-sheet [COUNT] [rgb|hsv]
fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(10);
    let space = match args.next().as_deref() {
        Some("rgb") => Interpolation::Rgb,
        _ => Interpolation::Hsv,
    };

    let palette = Palette::between(BASE[0], BASE[1], count, space);
    for (i, colour) in palette.iter().enumerate() {
        println!("{i:>3}  {colour}  text {}", colour.contrasting_text());
    }

    let out = std::fs::File::create("swatch-sheet.pdf").unwrap();
    SwatchSheet::new(palette)
        .with_page_size(pagesize::LETTER.landscape())
        .with_margin(In(0.25))
        .with_columns(count.min(6))
        .write(out)
        .unwrap();
}
