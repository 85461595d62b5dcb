// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy-loading images on first visibility.
//!
//! The canonical observer pattern: below-the-fold image placeholders are
//! observed, and the first time one intersects the viewport its load kicks
//! off and the callback unobserves it re-entrantly, since a loaded image
//! needs no more notifications. Once the last image loads, the queue is
//! empty and the observer detaches its host listeners by itself.
//!
//! Run:
//! - `cargo run -p lookout_demos --example lazy_images`

use std::cell::RefCell;
use std::rc::Rc;

use lookout_demos::pump;
use lookout_host_ref::{SimElement, SimHost};
use lookout_observer::{Observer, ObserverOptions, ViewEvent, ViewHost, ViewRect};

const IMAGE_COUNT: usize = 10;
const IMAGE_STRIDE: f64 = 450.0;

fn image_rect(index: usize, scroll: f64) -> ViewRect {
    ViewRect::from_origin_size(100.0, index as f64 * IMAGE_STRIDE - scroll, 600.0, 400.0)
}

fn main() {
    let host = SimHost::new(800.0, 600.0);
    let images: Vec<SimElement> = (0..IMAGE_COUNT)
        .map(|index| host.insert_element(image_rect(index, 0.0)))
        .collect();

    let loaded: Rc<RefCell<Vec<usize>>> = Rc::default();

    let lookup = images.clone();
    let sink = Rc::clone(&loaded);
    let mut observer = Observer::new(
        host.clone(),
        move |entries, observer: &mut Observer<SimHost>| {
            for entry in entries {
                if !entry.is_intersecting() {
                    continue;
                }
                let index = lookup
                    .iter()
                    .position(|image| *image == entry.target)
                    .expect("every observed image is in the list");
                println!("  [{:>5.0}ms] loading image {index}", entry.time);
                sink.borrow_mut().push(index);
                // Loaded is loaded; stop watching this one.
                observer.unobserve(&entry.target);
            }
        },
        ObserverOptions::default(),
    );
    // Observing reports transitions, not current state: an image already
    // on screen would never "enter". Load those up front and observe only
    // the ones still below the fold.
    for (index, &image) in images.iter().enumerate() {
        let visible = !host
            .element_rect(&image)
            .intersect(host.viewport_rect())
            .is_empty();
        if visible {
            println!("  [{:>5.0}ms] loading image {index} (already visible)", host.clock());
            loaded.borrow_mut().push(index);
        } else {
            observer.observe(image).unwrap();
        }
    }

    let mut scroll = 0.0;
    while observer.observed_count() > 0 {
        scroll += 500.0;
        for (index, &image) in images.iter().enumerate() {
            host.set_element_rect(image, image_rect(index, scroll));
        }
        host.advance(16.0);

        println!("scroll -> {scroll}px ({} still watched)", observer.observed_count());
        observer.handle_view_event(ViewEvent::Scroll);
        pump(&host, &mut observer);
    }

    println!(
        "all {} images loaded, in order {:?}; listeners detached: {}",
        loaded.borrow().len(),
        loaded.borrow(),
        !observer.is_bound(),
    );
}
