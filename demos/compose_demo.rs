//! Compose demo: Build a small layered scene and print it once.
//!
//! Run with `RUST_LOG=trace` to see every overlay step.

use cellstack::{Buffer, Cell, Display, Layer, Rgb};

fn text(x: i32, y: i32, s: &str, fg: Rgb, bg: Rgb) -> Buffer {
    let cells: Vec<Cell> = s.chars().map(|c| Cell::new(fg, bg, c)).collect();
    let width = u16::try_from(cells.len()).unwrap_or(u16::MAX);
    let mut buffer = Buffer::from_cells(width, cells).expect("single row always fits");
    buffer.move_to(x, y);
    buffer
}

fn main() -> cellstack::Result<()> {
    env_logger::init();

    let mut frame = cellstack::terminal::frame_for_terminal().unwrap_or_else(|_| Buffer::new(80, 24));
    println!("Frame: {:?}", frame);

    let mut desktop = Buffer::new(40, 10);
    desktop.fill_color(Rgb::from_u32(0x1E_1E_2E));

    let mut window = Buffer::new(24, 6);
    window.move_to(8, 2);
    window.fill_color(Rgb::from_u32(0x31_32_44));

    let mut shadow = Buffer::new(24, 6);
    shadow.move_to(9, 3);
    shadow.fill_color(Rgb::BLACK);

    let title = text(10, 3, " cellstack ", Rgb::WHITE, Rgb::from_u32(0x89_B4_FA));
    let body = text(10, 5, "layers, back to front", Rgb::from_u32(0xCD_D6_F4), Rgb::from_u32(0x31_32_44));

    let scene = [Layer::new(desktop)
        .with_child(Layer::new(shadow))
        .with_child(Layer::new(window).with_child(Layer::new(title)).with_child(Layer::new(body)))];

    let drawn = frame.compose(&scene)?;
    println!("Composed {drawn} layers");

    let mut display = cellstack::AnsiDisplay::stdout();
    display.present(&frame)?;
    display.restore()?;
    println!("\x1b[{};1H", frame.height().min(12));
    Ok(())
}
