//! End-to-end rendering: hash → generator → SVG / recorded commands.
//!
//! The SVG fixtures are exact. Any change to them changes the visible
//! identity of existing icons.

use n_draw::{DrawCommand, Recorder, Renderer};
use n_icon::config::LightnessOptions;
use n_icon::{Config, IconHash, Options, generate, to_svg};
use pretty_assertions::assert_eq;

const HASH: &str = "a3f9c1b2e7d04f8891";

const DEFAULT_100: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100px" height="100px" viewBox="0 0 100 100">"#,
    r##"<path fill="#a84538" d="M32.5 18.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0M53.5 18.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0M53.5 81.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0M32.5 81.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0M11.5 39.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0M74.5 39.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0M74.5 60.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0M11.5 60.5a7,7 0 1,1 14,0a7,7 0 1,1 -14,0"/>"##,
    r##"<path fill="#e8e8e8" d="M8 29L8 8L29 8ZM71 8L92 8L92 29ZM92 71L92 92L71 92ZM29 92L8 92L8 71Z"/>"##,
    r##"<path fill="#d17f75" d="M34 34L48 34L48 48L34 48ZM66 34L66 48L52 48L52 34ZM66 66L52 66L52 52L66 52ZM34 66L34 52L48 52L48 66Z"/>"##,
    "</svg>",
);

fn hash(s: &str) -> IconHash {
    IconHash::parse(s).unwrap()
}

fn config(options: Options) -> Config {
    Config::resolve(Some(&options))
}

// ── SVG snapshots ────────────────────────────────────────────────────────────

#[test]
fn default_icon_snapshot() {
    assert_eq!(to_svg(&hash(HASH), 100, &Config::default()), DEFAULT_100);
}

#[test]
fn opaque_background_adds_rect() {
    let config = config(Options {
        back_color: Some("#fff".into()),
        ..Options::default()
    });
    let svg = to_svg(&hash(HASH), 100, &config);

    let rect = r##"<rect width="100%" height="100%" fill="#ffffff" opacity="1.00"/>"##;
    let (open, rest) = DEFAULT_100.split_at(DEFAULT_100.find("<path").unwrap());
    assert_eq!(svg, format!("{open}{rect}{rest}"));
}

#[test]
fn translucent_background_opacity() {
    let config = config(Options {
        back_color: Some("#00000080".into()),
        ..Options::default()
    });
    let svg = to_svg(&hash(HASH), 100, &config);
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#000000" opacity="0.50"/>"##));
}

#[test]
fn fractional_coordinates_round_to_one_decimal() {
    let svg = to_svg(&hash("7e3c9a21f05b"), 48, &Config::default());
    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="48px" height="48px" viewBox="0 0 48 48">"#,
            r##"<path fill="#5b5b5b" d="M15.7 9a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0M25.7 9a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0M25.7 39a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0M15.7 39a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0M5.7 19a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0M35.7 19a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0M35.7 29a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0M5.7 29a3.3,3.3 0 1,1 6.7,0a3.3,3.3 0 1,1 -6.7,0"/>"##,
            r##"<path fill="#8494d6" d="M4 4L14 4L14 9ZM44 4L44 14L39 14ZM44 44L34 44L34 39ZM4 44L4 34L9 34ZM14 14L24 14L24 15.6L19.8 24L14 24ZM34 14L34 24L32.4 24L24 19.8L24 14ZM34 34L24 34L24 32.4L28.2 24L34 24ZM14 34L14 24L15.6 24L24 28.2L24 34Z"/>"##,
            "</svg>",
        )
    );
}

#[test]
fn hue_restriction_and_zero_padding() {
    let config = config(Options {
        hues: Some(vec![200.0]),
        padding: Some(0.0),
        ..Options::default()
    });
    let svg = to_svg(&hash("7e3c9a21f05b"), 48, &config);
    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="48px" height="48px" viewBox="0 0 48 48">"#,
            r##"<path fill="#464646" d="M14 6a4,4 0 1,1 8,0a4,4 0 1,1 -8,0M26 6a4,4 0 1,1 8,0a4,4 0 1,1 -8,0M26 42a4,4 0 1,1 8,0a4,4 0 1,1 -8,0M14 42a4,4 0 1,1 8,0a4,4 0 1,1 -8,0M2 18a4,4 0 1,1 8,0a4,4 0 1,1 -8,0M38 18a4,4 0 1,1 8,0a4,4 0 1,1 -8,0M38 30a4,4 0 1,1 8,0a4,4 0 1,1 -8,0M2 30a4,4 0 1,1 8,0a4,4 0 1,1 -8,0"/>"##,
            r##"<path fill="#59a3c7" d="M0 0L12 0L12 6ZM48 0L48 12L42 12ZM48 48L36 48L36 42ZM0 48L0 36L6 36ZM12 12L24 12L24 13.9L19 24L12 24ZM36 12L36 24L34.1 24L24 19L24 12ZM36 36L24 36L24 34.1L29 24L36 24ZM12 36L12 24L13.9 24L24 29L24 36Z"/>"##,
            "</svg>",
        )
    );
}

#[test]
fn groups_sharing_a_color_share_a_path() {
    // Corners and center both pick the mid color; the center is the sparse
    // accent circle.
    let svg = to_svg(&hash("0d00000000000"), 100, &Config::default());
    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100px" height="100px" viewBox="0 0 100 100">"#,
            r##"<path fill="#545454" d="M50 29L29 29L29 8ZM50 29L50 8L71 8ZM50 71L71 71L71 92ZM50 71L50 92L29 92ZM29 50L8 50L8 29ZM71 50L71 29L92 29ZM71 50L92 50L92 71ZM29 50L29 71L8 71Z"/>"##,
            r##"<path fill="#d17575" d="M29 29L8 29L8 8ZM71 29L71 8L92 8ZM71 71L92 71L92 92ZM29 71L29 92L8 92ZM37.4 50a12.6,12.6 0 1,1 25.2,0a12.6,12.6 0 1,1 -25.2,0"/>"##,
            "</svg>",
        )
    );
}

// ── Recorded structure ───────────────────────────────────────────────────────

fn record(h: &str, size: u32, config: &Config) -> Recorder {
    let mut rec = Recorder::new(size);
    generate(&mut rec, &hash(h), config);
    rec
}

/// A spread of hashes with every digit value in every consumed position.
fn sample_hashes() -> Vec<String> {
    (0..64u32)
        .map(|i| {
            let a = i % 16;
            let b = (i * 7 + 3) % 16;
            let c = (i * 11 + 5) % 16;
            format!("{a:x}{b:x}{c:x}{a:x}{b:x}{c:x}{b:x}{a:x}{c:x}{a:x}{b:x}{c:x}{a:x}")
        })
        .collect()
}

#[test]
fn every_icon_has_three_groups_and_at_most_five_colors() {
    for h in sample_hashes() {
        let rec = record(&h, 64, &Config::default());
        let colors = rec.shape_colors();
        assert_eq!(colors.len(), 3, "{h}");

        let mut distinct = colors.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= 5, "{h}");

        let begins = rec.commands().iter().filter(|c| matches!(c, DrawCommand::BeginShape(_)));
        let ends = rec.commands().iter().filter(|c| matches!(c, DrawCommand::EndShape));
        assert_eq!(begins.count(), ends.count(), "{h}");
    }
}

#[test]
fn clashing_colors_never_meet() {
    // Every combination of the three color digits (8, 9, 10).
    for a in 0..16u32 {
        for b in 0..16u32 {
            for c in 0..16u32 {
                let h = format!("00000000{a:x}{b:x}{c:x}");
                let slots = n_icon::generator::select_colors(&hash(&h));
                let has = |s: usize| slots.contains(&s);
                assert!(!(has(0) && has(4)), "{h}: {slots:?}");
                assert!(!(has(2) && has(3)), "{h}: {slots:?}");
                assert!(slots.iter().all(|&s| s < 5), "{h}: {slots:?}");
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    for h in sample_hashes() {
        assert_eq!(record(&h, 80, &Config::default()), record(&h, 80, &Config::default()));
    }
}

#[test]
fn geometry_stays_on_the_canvas() {
    for h in sample_hashes() {
        for size in [16, 33, 100] {
            let rec = record(&h, size, &Config::default());
            let limit = f64::from(rec.icon_size());
            for cmd in rec.commands() {
                if let DrawCommand::Polygon(points) = cmd {
                    for p in points {
                        assert!((0.0..=limit).contains(&p.x), "{h}@{size}: {p:?}");
                        assert!((0.0..=limit).contains(&p.y), "{h}@{size}: {p:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn lightness_override_changes_only_colors() {
    let config = config(Options {
        lightness: Some(LightnessOptions {
            color: Some([0.2, 0.6]),
            grayscale: None,
        }),
        ..Options::default()
    });
    let plain = record(HASH, 100, &Config::default());
    let tinted = record(HASH, 100, &config);

    assert_ne!(plain.shape_colors(), tinted.shape_colors());
    let geometry = |r: &Recorder| {
        r.commands()
            .iter()
            .filter(|c| c.is_primitive())
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(geometry(&plain), geometry(&tinted));
}

#[test]
fn tiny_icons_do_not_panic() {
    for size in 1..8 {
        let svg = to_svg(&hash(HASH), size, &Config::default());
        assert!(svg.starts_with("<svg"));
    }
}

#[test]
fn hashed_values_render() {
    for hash in [
        IconHash::from_value("alice@example.com", &n_icon::Sha1).unwrap(),
        IconHash::from_value("alice@example.com", &n_icon::Blake3).unwrap(),
    ] {
        let svg = to_svg(&hash, 64, &Config::default());
        assert!((1..=3).contains(&svg.matches("<path ").count()), "{svg}");
    }
}
