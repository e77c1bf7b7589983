use macroquad::prelude::*;
use life_banner::{rendering, BannerState, PointerTracker};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life Banner".to_owned(),
        window_width: 1200,
        window_height: 300,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut state = BannerState::new(screen_width(), screen_height());
    state.burn_in();

    let mut pointer = PointerTracker::new();

    loop {
        // A resized surface means fresh dimensions and a fresh random seed
        state.handle_resize(screen_width(), screen_height());

        // Mouse movement, throttled, is the only thing that advances the
        // colony after burn-in
        if pointer.poll() {
            state.advance();
        }

        clear_background(WHITE);
        rendering::draw_grid(state.grid());

        next_frame().await;
    }
}
