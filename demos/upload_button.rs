//! Upload Button Flags
//!
//! This demo derives the props of a "download demo" button from the
//! recording and upload status of a session.
//!
//! Key concepts:
//! - Priority ordering of mutually exclusive states
//! - Membership, lookup and computed flags side by side
//! - Re-evaluating with a new snapshot instead of transitioning
//!
//! Run with: cargo run --example upload_button

use state_flags::{evaluate, flags, states, StateEnum, States};

fn main() {
    println!("=== Upload Button Flags ===\n");

    let flags = flags! {
        isDisabled => [isNotRecorded, isUploading],
        text => {
            isNotRecorded: "Demo Disabled",
            isUploading: "Demo Uploading...",
            isUploaded: "Download Demo",
        },
        showSpinner => |_: &States, order: &StateEnum, index: Option<usize>| {
            index == order.index_of("isUploading")
        },
    };

    let snapshots = [(false, false), (true, false), (true, true)];

    for (recorded, uploaded) in snapshots {
        let states = states! {
            isNotRecorded: !recorded,
            isUploading: recorded && !uploaded,
            isUploaded: uploaded,
        };

        let active = states.active().map_or("none", |a| a.name);
        let result = evaluate(&states, &flags);

        println!("recorded={recorded:<5} uploaded={uploaded:<5} active={active}");
        println!("  props: {}\n", result.to_json());
    }

    println!("=== Demo Complete ===");
}
