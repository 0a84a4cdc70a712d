//! Location codec over the shared broadcast channel
//!
//! A location travels as two scalar messages, one per axis, each tagged
//! with a kind. The channel is lossy and shared: anything in signal range
//! hears a broadcast, so inbound traffic is filtered to same-team origin
//! before it is trusted.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{SIGNAL_STRENGTH_MAX, SIGNAL_STRENGTH_MIN};
use crate::core::error::Result;
use crate::core::types::Affiliation;
use crate::grid::MapLocation;
use crate::host::WorldHost;

/// Tag identifying which coordinate a scalar message carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    OpposingSpawnX,
    OpposingSpawnY,
    HazardSourceX,
    HazardSourceY,
}

/// Payload of a well-formed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub kind: MessageKind,
    pub value: i32,
}

/// An inbound message as seen by one agent.
///
/// `body` is None for plain pings and other traffic the host could not
/// give a payload; the codec ignores those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub origin: Affiliation,
    pub body: Option<MessageBody>,
}

/// Recover the most recently reported location for a kind pair from a
/// batch of inbound messages.
///
/// Foreign-origin and body-less messages are discarded. The last writer
/// per axis wins. One observed axis is enough to produce a location; the
/// unobserved axis stays at 0.
pub fn decode_latest_from(
    messages: &[Message],
    kind_x: MessageKind,
    kind_y: MessageKind,
) -> Option<MapLocation> {
    let mut x = 0;
    let mut y = 0;
    let mut found = false;

    for message in messages {
        if message.origin != Affiliation::Friendly {
            continue;
        }
        let Some(body) = message.body else {
            continue;
        };
        if body.kind == kind_x {
            x = body.value;
            found = true;
        } else if body.kind == kind_y {
            y = body.value;
            found = true;
        }
    }

    found.then(|| MapLocation::new(x, y))
}

/// Drain this turn's inbound queue and decode the given kind pair
pub fn decode_latest(
    host: &mut dyn WorldHost,
    kind_x: MessageKind,
    kind_y: MessageKind,
) -> Option<MapLocation> {
    let inbound = host.drain_inbound();
    decode_latest_from(&inbound, kind_x, kind_y)
}

/// Broadcast a location as two scalar messages, x then y, each with an
/// independently randomized signal strength. Delivery is best-effort.
pub fn broadcast_location(
    host: &mut dyn WorldHost,
    rng: &mut impl Rng,
    kind_x: MessageKind,
    kind_y: MessageKind,
    location: MapLocation,
) -> Result<()> {
    host.broadcast(
        kind_x,
        location.x,
        rng.gen_range(SIGNAL_STRENGTH_MIN..SIGNAL_STRENGTH_MAX),
    )?;
    host.broadcast(
        kind_y,
        location.y,
        rng.gen_range(SIGNAL_STRENGTH_MIN..SIGNAL_STRENGTH_MAX),
    )?;
    Ok(())
}
