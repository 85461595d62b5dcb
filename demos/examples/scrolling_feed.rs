// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Watching feed cards enter and leave a scrolling viewport.
//!
//! Twelve cards stack below an 800×600 viewport; the demo scrolls the feed
//! in steps and prints every visibility transition the observer delivers.
//! Note that deliveries happen on the pumped wake after each scroll, never
//! during the scroll itself, and that a scroll step that flips nothing
//! delivers nothing.
//!
//! Run:
//! - `cargo run -p lookout_demos --example scrolling_feed`

use lookout_demos::{format_rect, pump};
use lookout_host_ref::{SimElement, SimHost};
use lookout_observer::{Observer, ObserverOptions, ViewEvent, ViewHost, ViewRect};

const CARD_HEIGHT: f64 = 180.0;
const CARD_GAP: f64 = 20.0;
const CARD_COUNT: usize = 12;

/// Rect of card `index` with the feed scrolled down by `scroll` pixels.
fn card_rect(index: usize, scroll: f64) -> ViewRect {
    let stride = CARD_HEIGHT + CARD_GAP;
    ViewRect::from_origin_size(40.0, index as f64 * stride - scroll, 720.0, CARD_HEIGHT)
}

fn main() {
    let host = SimHost::new(800.0, 600.0);
    let cards: Vec<SimElement> = (0..CARD_COUNT)
        .map(|index| host.insert_element(card_rect(index, 0.0)))
        .collect();

    println!(
        "viewport {}; {} cards of {}",
        format_rect(host.viewport_rect()),
        CARD_COUNT,
        format_rect(card_rect(0, 0.0)),
    );

    let names = cards.clone();
    let mut observer = Observer::new(
        host.clone(),
        move |entries, _observer: &mut Observer<SimHost>| {
            for entry in entries {
                let index = names
                    .iter()
                    .position(|card| *card == entry.target)
                    .expect("every observed card is in the list");
                let verb = if entry.is_intersecting() {
                    "entered"
                } else {
                    "left"
                };
                println!("  [{:>5.0}ms] card {index:>2} {verb}", entry.time);
            }
        },
        ObserverOptions::default(),
    );
    for &card in &cards {
        observer.observe(card).unwrap();
    }

    // Scroll the feed down in 320-pixel steps, pumping the run loop after
    // each event like an embedding UI would between frames.
    for step in 1..=7 {
        let scroll = f64::from(step) * 320.0;
        for (index, &card) in cards.iter().enumerate() {
            host.set_element_rect(card, card_rect(index, scroll));
        }
        host.advance(16.0);

        println!("scroll -> {scroll}px");
        observer.handle_view_event(ViewEvent::Scroll);
        if pump(&host, &mut observer) == 0 {
            println!("  (no transitions)");
        }
    }

    let records = observer.take_records();
    let visible = records.iter().filter(|entry| entry.is_intersecting()).count();
    println!("done: {visible} of {} cards visible at the end", records.len());
}
