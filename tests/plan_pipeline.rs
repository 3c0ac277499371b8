use image::Rgb;
use roomplan::renderer::Palette;
use roomplan::theme::Theme;
use roomplan::{GeneratorConfig, LayoutError, LayoutGenerator};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("roomplan-{}-{}", std::process::id(), name))
}

fn generator_for(theme: &Theme, seed: u64) -> LayoutGenerator {
    let config = GeneratorConfig {
        seed: Some(seed),
        title: theme.title.clone(),
        font: theme.font.clone(),
        ..Default::default()
    };
    LayoutGenerator::new(config, Palette::from_theme(&theme.palette).unwrap()).unwrap()
}

#[test]
fn default_plan_roundtrips_through_png() {
    let theme = Theme::load_builtin("default").unwrap();
    let mut generator = generator_for(&theme, 2024);
    generator.generate().unwrap();

    let path = temp_path("default.png");
    generator.save(&path).unwrap();
    let image = image::open(&path).unwrap().to_rgb8();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(image.dimensions(), (800, 600));
    assert_eq!(image.get_pixel(0, 0), &Rgb([0xff, 0xff, 0xff]));
    assert_eq!(image.get_pixel(50, 50), &Rgb([0x2c, 0x3e, 0x50]));

    let furniture_red = image.pixels().filter(|p| **p == Rgb([0xe7, 0x4c, 0x3c])).count();
    assert!(furniture_red > 0);
}

#[test]
fn themed_plan_uses_theme_colors() {
    let theme = Theme::load_builtin("blueprint").unwrap();
    let mut generator = generator_for(&theme, 7);
    generator.generate().unwrap();

    let path = temp_path("blueprint.bmp");
    generator.save(&path).unwrap();
    let image = image::open(&path).unwrap().to_rgb8();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(image.get_pixel(0, 0), &Rgb([0x0b, 0x3d, 0x91]));
    assert_eq!(image.get_pixel(50, 50), &Rgb([0xff, 0xff, 0xff]));
    assert_eq!(generator.layout().caption.as_deref(), Some("ROOM LAYOUT"));
}

#[test]
fn identical_seeds_write_identical_files() {
    let theme = Theme::default();
    let paths = [temp_path("a.png"), temp_path("b.png")];

    for path in &paths {
        let mut generator = generator_for(&theme, 99);
        generator.generate().unwrap();
        generator.save(path).unwrap();
    }

    let a = std::fs::read(&paths[0]).unwrap();
    let b = std::fs::read(&paths[1]).unwrap();
    for path in &paths {
        std::fs::remove_file(path).unwrap();
    }
    assert_eq!(a, b);
}

#[test]
fn unwritable_output_reports_io_error() {
    let mut generator = generator_for(&Theme::default(), 1);
    generator.generate().unwrap();

    let path = temp_path("missing").join("nested").join("room_layout.png");
    let err = generator.save(&path).unwrap_err();
    assert!(matches!(err, LayoutError::Io { .. }));
    assert!(err.to_string().contains("room_layout.png"));
}
