// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A content-driven sheet with no detents: present, drag, dismiss.
//!
//! This example feeds raw pointer positions through a [`DragTracker`] and
//! shows the outputs a host would render from after each event.
//!
//! Run:
//! - `cargo run -p undersheet_demos --example sheet_basics`

use kurbo::Point;
use undersheet_detent::Metrics;
use undersheet_session::config::SheetConfig;
use undersheet_session::drag::DragTracker;
use undersheet_session::session::{SheetSession, SnapResponse};

fn main() {
    let metrics = Metrics::from_heights(800.0, 50.0);
    let mut sheet = SheetSession::new(SheetConfig::default(), &metrics);
    let mut drag = DragTracker::new();

    sheet.present();
    sheet.set_content_height(320.0);
    println!("== Presented ==");
    println!(
        "  height {} offset {} scrim {}",
        sheet.height(&metrics),
        sheet.offset(),
        sheet.shows_scrim()
    );
    assert_eq!(sheet.height(&metrics), 320.0);

    // The finger drags down 80 units; the sheet follows 1:1.
    drag.begin(Point::new(200.0, 600.0));
    let dy = drag.update(Point::new(200.0, 680.0));
    sheet.drag_changed(dy, &metrics);
    println!("== Dragging ==");
    println!("  offset {}", sheet.offset());
    assert_eq!(sheet.offset(), 80.0);

    // Released within the neutral band: snap back to rest.
    let final_dy = drag.finish(Point::new(200.0, 680.0));
    let snap = sheet.drag_ended(final_dy);
    println!("== Released ==");
    println!("  {:?}, offset {}", snap, sheet.offset());
    assert_eq!(snap, SnapResponse::Settled);
    assert_eq!(sheet.offset(), 0.0);

    // A longer pull past the commit threshold dismisses: there is no
    // smaller detent to retreat to.
    drag.begin(Point::new(200.0, 600.0));
    sheet.drag_changed(drag.update(Point::new(200.0, 740.0)), &metrics);
    let snap = sheet.drag_ended(drag.finish(Point::new(200.0, 740.0)));
    println!("== Pulled down ==");
    println!("  {:?}, presented {}", snap, sheet.is_presented());
    assert_eq!(snap, SnapResponse::Dismissed);
    assert!(!sheet.is_presented());
}
