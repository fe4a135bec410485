// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for telemetry values

//! Desktop demo of the transmitter panel.
//!
//! Builds the UI, feeds synthetic stick telemetry through the registry
//! handles, ticks the screen once per frame, and pushes the frame to an SDL
//! window whenever the tree reports a change.
//!
//! Button mapping:
//!   Q/W/E/R - toggle AUX1..AUX4
//!   Escape  - quit

use std::fmt::Write;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use mando_rc_ui::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, TEXT_LEN};
use mando_rc_ui::{ScreenId, WidgetId, WidgetTree, create_screens, draw, tick_screen_by_id};

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Mando RC", &output_settings);

    let mut ui = create_screens();

    // First frame before the event loop starts
    if ui.tree.take_changed() {
        draw(&ui.tree, ui.objects.main, &mut display).ok();
    }
    window.update(&display);

    // Signal generation time parameter (advances each frame)
    let mut t = 0.0f32;

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, aux switch toggles)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    let objects = ui.objects;
                    match keycode {
                        Keycode::Q => toggle(&mut ui.tree, objects.aux1),
                        Keycode::W => toggle(&mut ui.tree, objects.aux2),
                        Keycode::E => toggle(&mut ui.tree, objects.aux3),
                        Keycode::R => toggle(&mut ui.tree, objects.aux4),
                        Keycode::Escape => return,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Synthetic stick telemetry: throttle 0..100, trims -30..30
        let throttle = fake_signal(t, 0.0, 100.0, 0.30) as i32;
        let roll = fake_signal(t, -30.0, 30.0, 0.80) as i32;
        let pitch = fake_signal(t, -30.0, 30.0, 0.55) as i32;
        let yaw = fake_signal(t, -30.0, 30.0, 0.40) as i32;

        let objects = ui.objects;
        set_channel(&mut ui.tree, objects.arc1, objects.ind1, throttle);
        set_channel(&mut ui.tree, objects.arc2, objects.ind2, roll);
        set_channel(&mut ui.tree, objects.arc3, objects.ind3, pitch);
        set_channel(&mut ui.tree, objects.arc4, objects.ind4, yaw);

        tick_screen_by_id(&mut ui, ScreenId::Main);

        // Redraw only when something actually changed
        if ui.tree.take_changed() {
            draw(&ui.tree, ui.objects.main, &mut display).ok();
            window.update(&display);
        }

        t += 0.05;

        // Sleep to maintain target frame rate (~50 FPS)
        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME.checked_sub(pre_sleep).unwrap());
        }
    }
}

/// Write one channel's value into its gauge and numeric readout.
fn set_channel(tree: &mut WidgetTree, arc: WidgetId, readout: WidgetId, value: i32) {
    tree.set_arc_value(arc, value);
    let mut text = String::<TEXT_LEN>::new();
    write!(text, "{value}").ok();
    tree.set_label_text(readout, &text);
}

fn toggle(tree: &mut WidgetTree, aux: WidgetId) {
    let checked = tree.is_checked(aux);
    tree.set_checked(aux, !checked);
}

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// Used to simulate stick positions in demo mode.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
