use neopixel_panel::{count, lookup, NEOPIXEL_COUNT};

fn main() {
    env_logger::init();

    println!("NeoPixel Total Count: {}", count());

    for id in 0..5 {
        if let Some(coord) = lookup(id) {
            println!("{}", coord);
            println!(
                "  Float values: x={:.2}mm, y={:.2}mm, r={:.2}mm, theta={:.1}°",
                coord.x_mm(),
                coord.y_mm(),
                coord.r_mm(),
                coord.theta_degrees()
            );
        }
    }

    let invalid = lookup(-1);
    println!(
        "Invalid ID test: {}",
        if invalid.is_none() { "None (ok)" } else { "Error" }
    );

    let invalid = lookup(NEOPIXEL_COUNT);
    println!(
        "Out of range test: {}",
        if invalid.is_none() { "None (ok)" } else { "Error" }
    );
}
