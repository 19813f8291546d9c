//! Reference catalog loaded on every start.
//!
//! Values are kept exactly as published, including the Bera BR 200cc torque
//! figures (6500 Nm @ 12500 rpm) which are almost certainly a data-entry
//! error upstream.

use motocompare_core::motorcycle::CreateMotorcycle;

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    brand: &str,
    model: &str,
    year: i32,
    price: i64,
    category: &str,
    engine_type: &str,
    displacement: i32,
    power: (f64, i32),
    torque: (f64, i32),
    dimensions: (i32, i32, i32, i32),
    dry_weight: i32,
    top_speed: i32,
    fuel: (f64, f64),
    electronics: (i32, bool, i32),
    image_url: &str,
    tags: &[&str],
) -> CreateMotorcycle {
    let (length, width, height, wheelbase) = dimensions;
    let (riding_modes, abs, traction_control) = electronics;
    CreateMotorcycle {
        name: name.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        price,
        category: category.to_string(),
        engine_type: engine_type.to_string(),
        displacement,
        max_power: power.0,
        max_power_rpm: power.1,
        max_torque: torque.0,
        max_torque_rpm: torque.1,
        length,
        width,
        height,
        wheelbase,
        dry_weight,
        top_speed,
        fuel_capacity: fuel.0,
        fuel_consumption: fuel.1,
        riding_modes,
        abs,
        traction_control,
        image_url: Some(image_url.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The seven reference records, in catalog order.
pub fn seed_records() -> Vec<CreateMotorcycle> {
    vec![
        record(
            "Bera SBR 150cc",
            "Bera",
            "SBR 150cc",
            2025,
            980,
            "Classic",
            "1-Cylinder, 4-Stroke",
            124,
            (12.0, 7000),
            (9.5, 7500),
            (1925, 735, 950, 1235),
            98,
            137,
            (12.5, 2.5),
            (0, false, 0),
            "https://i.postimg.cc/Vv6wVhW2/bera-sbr.png",
            &["classic", "urban", "economical"],
        ),
        record(
            "Bera BRF 150cc",
            "Bera",
            "BRF 150cc",
            2025,
            950,
            "Classic",
            "1-Cylinder, 4-Stroke",
            149,
            (12.0, 7000),
            (9.5, 7500),
            (2010, 790, 1070, 1275),
            109,
            90,
            (13.0, 2.9),
            (0, false, 0),
            "https://i.postimg.cc/kM6JcFDQ/bera-brf.png",
            &["classic", "urban", "economical"],
        ),
        record(
            "Bera BR 200cc",
            "Bera",
            "BR 200cc",
            2025,
            1360,
            "Classic",
            "1-Cylinder, 4-Stroke",
            200,
            (15.0, 8500),
            (6500.0, 12500),
            (2000, 790, 1020, 1290),
            110,
            110,
            (15.0, 2.9),
            (0, false, 0),
            "https://i.postimg.cc/j5k12FfL/bera-br-200.png",
            &["classic", "urban", "economical", "commuter"],
        ),
        record(
            "AVA Tigrito 175cc",
            "AVA",
            "Tigrito 175cc",
            2025,
            1250,
            "Off-Road",
            "1-Cylinder, 4-Stroke",
            175,
            (11.8, 7500),
            (18.0, 8000),
            (2130, 870, 1220, 1410),
            130,
            110,
            (11.0, 3.2),
            (0, false, 0),
            "https://i.postimg.cc/FHQPfGrV/ava-tigrito-175.png",
            &["offroad", "trail", "rural", "adventure"],
        ),
        record(
            "Kawasaki Ninja ZX-10R",
            "Kawasaki",
            "Ninja ZX-10R",
            2023,
            16399,
            "Sport",
            "4-Cylinder, 4-Stroke",
            998,
            (203.0, 13000),
            (114.9, 11400),
            (2085, 750, 1185, 1450),
            207,
            300,
            (17.0, 7.5),
            (4, true, 3),
            "https://images.unsplash.com/photo-1609630875171-b1321377ee65?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200",
            &["sport", "track", "racing", "aggressive"],
        ),
        record(
            "Ducati Panigale V4",
            "Ducati",
            "Panigale V4",
            2023,
            22595,
            "Sport",
            "V4, 4-Stroke",
            1103,
            (214.0, 13000),
            (124.0, 10000),
            (2056, 730, 1145, 1469),
            195,
            300,
            (16.0, 8.1),
            (4, true, 8),
            "https://images.unsplash.com/photo-1609630875171-b1321377ee65?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200",
            &["sport", "italian", "v4", "premium"],
        ),
        record(
            "BMW S1000RR",
            "BMW",
            "S1000RR",
            2023,
            17895,
            "Sport",
            "4-Cylinder, 4-Stroke",
            999,
            (205.0, 13500),
            (113.0, 11000),
            (2073, 848, 1138, 1441),
            197,
            299,
            (16.5, 7.3),
            (4, true, 8),
            "https://images.unsplash.com/photo-1568772585407-9361f9bf3a87?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            &["sport", "german", "technology", "premium"],
        ),
    ]
}
