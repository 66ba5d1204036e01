//! Desktop demo: a ticking countdown rendered with the label widgets.
//!
//! Runs the widget redraw protocol against `embedded-graphics-simulator`:
//! every tick pushes the current minutes/seconds into the value labels,
//! and the dirty tracking makes sure only widgets whose content actually
//! changed touch the display. There is no input handling beyond closing
//! the window.
//!
//! Run with: `cargo run --bin timer-sim --features simulator`

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use timer_widgets::colors::{BACKGROUND, BUTTON_ACTIVE};
use timer_widgets::config::{
    BUTTONS_Y, FALLBACK_INITIAL_MINUTES, FALLBACK_INITIAL_SECONDS, LEFT_BUTTON_X, MAIN_TOP, MIDDLE_BUTTON_X,
    RIGHT_BUTTON_X, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_INTERVAL,
};
use timer_widgets::styles::{BUTTON_STYLE, TIMER_STYLE, TITLE_STYLE};
use timer_widgets::{Label, ValueLabel};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Countdown Timer", &output_settings);

    display.clear(BACKGROUND).ok();

    // Title bar, centered at the top.
    let mut title = Label::new(Point::new(0, 2), TITLE_STYLE, 8, Some("timer"));
    title.move_to(Point::new(center_x(title.width()), 2));

    // The countdown itself: minutes, a colon, zero-padded seconds.
    let mut minutes = ValueLabel::new(Point::zero(), TIMER_STYLE, 3, FALLBACK_INITIAL_MINUTES, None)
        .expect("plain decimal pattern fits the value buffer");
    let mut seconds = ValueLabel::new(Point::zero(), TIMER_STYLE, 2, FALLBACK_INITIAL_SECONDS, Some("%02d"))
        .expect("zero-padded pattern fits the value buffer");
    let mut colon = Label::new(Point::zero(), TIMER_STYLE, 1, Some(":"));

    let timer_y = MAIN_TOP + 40;
    let total = minutes.width() + colon.width() + seconds.width();
    let left = center_x(total);
    minutes.move_to(Point::new(left, timer_y));
    colon.move_to(Point::new(left + minutes.width() as i32, timer_y));
    seconds.move_to(Point::new(left + (minutes.width() + colon.width()) as i32, timer_y));

    // Button row, mirroring the physical buttons below the screen.
    let mut buttons = [
        Label::new(Point::new(LEFT_BUTTON_X, BUTTONS_Y), BUTTON_STYLE, 4, Some("Min+")),
        Label::new(Point::new(MIDDLE_BUTTON_X, BUTTONS_Y), BUTTON_STYLE, 4, Some("Sec+")),
        Label::new(Point::new(RIGHT_BUTTON_X, BUTTONS_Y), BUTTON_STYLE, 5, Some("Start")),
    ];

    // First frame: the baseline sentinels force every widget to paint.
    title.redraw(&mut display, false);
    minutes.redraw(&mut display, false);
    colon.redraw(&mut display, false);
    seconds.redraw(&mut display, false);
    for button in &mut buttons {
        button.redraw(&mut display, false);
    }
    window.update(&display);

    let (mut mins, mut secs) = (FALLBACK_INITIAL_MINUTES, FALLBACK_INITIAL_SECONDS);
    let mut finished = false;
    let mut last_second = Instant::now();

    'running: loop {
        if !finished && last_second.elapsed().as_secs() >= 1 {
            last_second = Instant::now();
            if secs > 0 {
                secs -= 1;
            } else if mins > 0 {
                mins -= 1;
                secs = 59;
            } else {
                // Expired: highlight the countdown.
                finished = true;
                minutes.set_back_color(&mut display, BUTTON_ACTIVE, false);
                colon.set_back_color(&mut display, BUTTON_ACTIVE, false);
                seconds.set_back_color(&mut display, BUTTON_ACTIVE, true);
            }
        }

        // Redundant most ticks; the dirty tracking turns these into no-ops
        // until a value or color actually changed.
        minutes.set_value(&mut display, mins);
        seconds.set_value(&mut display, secs);
        colon.redraw(&mut display, false);

        window.update(&display);
        for event in window.events() {
            if let SimulatorEvent::Quit = event {
                break 'running;
            }
        }
        thread::sleep(TICK_INTERVAL);
    }
}

/// X position centering a widget of the given width on the screen.
fn center_x(width: u32) -> i32 {
    (SCREEN_WIDTH as i32 - width as i32) / 2
}
