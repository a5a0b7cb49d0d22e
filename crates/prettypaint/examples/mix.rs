use prettypaint::error::MixingError;
use prettypaint::paints::artist_pigments;
use prettypaint::{Mixer, Palette};

fn swatch(label: &str, color: prettypaint::Rgb) {
    let [r, g, b] = color.clamped_24bit();
    println!("    \x1b[48;2;{};{};{}m        \x1b[0m  {}  {}", r, g, b, label, color);
}

fn main() -> Result<(), MixingError> {
    // 1. Stand up the mixer
    let mixer = Mixer::new(artist_pigments())?;

    // 2. Describe the mixtures
    let pure_white = Palette::new().with("White", 1.0);
    let pure_cobalt = Palette::new().with("Cobalt Blue", 1.0);
    let half_half = Palette::new().with("White", 0.5).with("Cobalt Blue", 0.5);
    let spring_green = Palette::new()
        .with("White", 0.25)
        .with("Cadmium Yellow", 0.25)
        .with("Phthalo Green", 0.5);

    // 3. Mix!
    println!();
    swatch("White", mixer.mix(&pure_white)?);
    swatch("Cobalt Blue", mixer.mix(&pure_cobalt)?);
    swatch("White / Cobalt Blue", mixer.mix(&half_half)?);
    swatch("White / Cadmium Yellow / Phthalo Green", mixer.mix(&spring_green)?);
    println!();

    Ok(())
}
