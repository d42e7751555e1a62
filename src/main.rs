//! Folio Motion entry point
//!
//! On the web this wires every effect to the portfolio page. Natively it
//! runs a short headless pass over the particle field and terminal script.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    folio_motion::web::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Folio Motion (native) starting...");
    log::info!("Browser effects need the wasm32 build; running headless demo");

    demo_particles();
    demo_terminal();
    demo_timeline();
    demo_scroll();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_particles() {
    use folio_motion::particles::ParticleField;
    use folio_motion::renderer::FrameRecorder;
    use folio_motion::settings::DeviceClass;

    let device = DeviceClass::from_viewport_width(1280.0);
    let mut field = ParticleField::new(7);
    field.initialize(1280.0, 720.0, device.particle_count());

    let mut recorder = FrameRecorder::new();
    for frame in 0..120 {
        recorder.reset();
        let stats = field.advance_frame(&mut recorder);
        if frame % 30 == 0 {
            println!(
                "frame {:>3}: {} particles, {} links",
                frame, stats.particles, stats.links
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_terminal() {
    use folio_motion::terminal::{Script, Transcript, replay_instantly};

    let script = Script::portfolio();
    let mut transcript = Transcript::new();
    let waited = replay_instantly(&script, &mut transcript);
    println!("\n{}\n", transcript.render());
    println!("terminal playback takes {}ms", waited);
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_timeline() {
    use folio_motion::reveal::{HeroStep, hero_timeline};

    let timeline = hero_timeline();
    let counts = |step: &HeroStep| match step {
        HeroStep::Reveal { targets: ".nav-links a", .. } => 4,
        HeroStep::Reveal { targets: ".badge", .. } => 3,
        _ => 1,
    };
    for (step, placement) in timeline.layout(&counts) {
        let name = match step {
            HeroStep::Reveal { targets, .. } => *targets,
            HeroStep::StartTerminal => "terminal",
        };
        println!(
            "{:>18} starts at {:>6.0}ms, ends at {:>6.0}ms",
            name,
            placement.start_ms,
            placement.end_ms()
        );
    }
    println!("hero timeline: {:.0}ms", timeline.total_ms(&counts));
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_scroll() {
    use folio_motion::scroll::{progress_width, scroll_percent};

    for top in [0.0, 750.0, 1500.0, 3000.0] {
        let percent = scroll_percent(top, 2500.0, 1000.0);
        println!("scrollTop {:>6.0} -> width {}", top, progress_width(percent));
    }
}
