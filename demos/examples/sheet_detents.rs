// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking a sheet through its detents: preview, advance, retreat, dismiss.
//!
//! Run:
//! - `cargo run -p undersheet_demos --example sheet_detents`

use undersheet_detent::{Detent, Metrics};
use undersheet_session::config::{Chrome, SheetConfig};
use undersheet_session::session::{SheetSession, SnapResponse};

fn main() {
    let metrics = Metrics::from_heights(800.0, 50.0);
    let config = SheetConfig {
        chrome: Chrome::DRAG_INDICATOR | Chrome::SCRIM,
        detents: Some(vec![Detent::Fraction(0.5), Detent::FullScreen]),
        ..SheetConfig::default()
    };
    let mut sheet = SheetSession::new(config, &metrics);

    sheet.present();
    println!("== Presented ==");
    println!(
        "  detent {:?} height {}",
        sheet.current_detent(),
        sheet.height(&metrics)
    );
    assert_eq!(sheet.height(&metrics), 400.0);

    // An upward drag past the dead zone previews the next detent, damped.
    sheet.drag_changed(-60.0, &metrics);
    println!("== Upward preview (-60) ==");
    println!("  height {}", sheet.height(&metrics));
    assert_eq!(sheet.height(&metrics), 440.0);

    // The fling commits: advance to full screen.
    let snap = sheet.drag_ended(-150.0);
    println!("== Fling up ==");
    println!(
        "  {:?}, height {}, drag indicator {}",
        snap,
        sheet.height(&metrics),
        sheet.shows_drag_indicator(&metrics)
    );
    assert_eq!(snap, SnapResponse::Advanced(1));
    assert!(sheet.is_full_screen(&metrics));
    assert!(!sheet.shows_drag_indicator(&metrics));
    assert!(sheet.shows_close_button(&metrics));

    // Dragging back down retreats one detent at a time.
    let snap = sheet.drag_ended(150.0);
    println!("== Drag down ==");
    println!("  {:?}, height {}", snap, sheet.height(&metrics));
    assert_eq!(snap, SnapResponse::Retreated(0));

    // From the smallest detent the same gesture dismisses instead.
    let snap = sheet.drag_ended(150.0);
    println!("== Drag down again ==");
    println!("  {:?}, presented {}", snap, sheet.is_presented());
    assert_eq!(snap, SnapResponse::Dismissed);

    // Re-presenting always starts back at the entry detent.
    sheet.present();
    assert_eq!(sheet.current_detent(), Some(0));
    println!("== Re-presented at entry detent ==");
}
