//! Broadcast channel messages and the location codec

pub mod codec;

pub use codec::{
    broadcast_location, decode_latest, decode_latest_from, Message, MessageBody, MessageKind,
};
