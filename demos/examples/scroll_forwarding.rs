// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested scrolling inside a sheet: gating and edge-drag forwarding.
//!
//! A tall list lives inside a half-screen sheet. While the list can scroll,
//! drags stay internal; once it is pulled at its top edge, the gate forwards
//! the gesture to the sheet, which then snaps or dismisses as if dragged
//! directly.
//!
//! Run:
//! - `cargo run -p undersheet_demos --example scroll_forwarding`

use undersheet_detent::{Detent, Metrics};
use undersheet_scroll::adapters::session::{relay_scroll_changed, relay_scroll_ended, scroll_enabled};
use undersheet_scroll::gate::ScrollGate;
use undersheet_session::config::SheetConfig;
use undersheet_session::session::{SheetSession, SnapResponse};

fn main() {
    let metrics = Metrics::from_heights(800.0, 50.0);
    let config = SheetConfig {
        detents: Some(vec![Detent::Fraction(0.5), Detent::FullScreen]),
        ..SheetConfig::default()
    };
    let mut sheet = SheetSession::new(config, &metrics);
    let mut gate = ScrollGate::new();

    sheet.present();
    sheet.set_content_height(1200.0);
    println!("== Presented with tall content ==");
    println!("  inner scroll enabled: {}", scroll_enabled(&sheet, &metrics));
    assert!(scroll_enabled(&sheet, &metrics));

    // Scrolling in the middle of the list never reaches the sheet.
    let response = relay_scroll_changed(&mut gate, &mut sheet, 140.0, 40.0, &metrics);
    println!("== Mid-list scroll ==");
    println!("  forwarded: {:?}, offset {}", response, sheet.offset());
    assert!(response.is_none());
    assert_eq!(relay_scroll_ended(&mut gate, &mut sheet), None);

    // Pulled down at the top edge: the drag is forwarded, bounce suppressed.
    let response = relay_scroll_changed(&mut gate, &mut sheet, -6.0, 120.0, &metrics);
    println!("== Edge pull ==");
    println!(
        "  forwarded: {:?}, offset {}, bounce {}",
        response,
        sheet.offset(),
        gate.bounce_enabled()
    );
    assert!(response.is_some());
    assert_eq!(sheet.offset(), 120.0);
    assert!(!gate.bounce_enabled());

    // The gesture ends past the commit threshold from the smallest detent:
    // the sheet dismisses and the list's bounce comes back.
    let snap = relay_scroll_ended(&mut gate, &mut sheet);
    println!("== Edge pull released ==");
    println!(
        "  {:?}, presented {}, bounce {}",
        snap,
        sheet.is_presented(),
        gate.bounce_enabled()
    );
    assert_eq!(snap, Some(SnapResponse::Dismissed));
    assert!(!sheet.is_presented());
    assert!(gate.bounce_enabled());
}
