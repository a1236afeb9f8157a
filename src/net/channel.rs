//! Outbound seam between the reactor and the host socket.
//!
//! The reactor only ever emits; subscriptions are wired by the host, which
//! feeds inbound events into the reactor's input queue.

use super::types::OutboundEvent;

/// Failure to hand an event to the socket.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The payload could not be serialized.
    #[error("failed to encode {event} payload: {reason}")]
    Encode { event: &'static str, reason: String },
    /// The socket rejected or threw during `emit`.
    #[error("socket emit of {event} failed: {reason}")]
    Emit { event: &'static str, reason: String },
}

/// Named-event sink supplied by the host.
pub trait Channel {
    /// Emit `event` to the server.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the payload cannot be encoded or the
    /// socket throws.
    fn emit(&self, event: &OutboundEvent) -> Result<(), ChannelError>;
}

#[cfg(feature = "csr")]
pub use socket::{Socket, SocketChannel, js_to_json};

#[cfg(feature = "csr")]
mod socket {
    use serde::Serialize;
    use serde_wasm_bindgen::Serializer;
    use wasm_bindgen::prelude::*;

    use super::{Channel, ChannelError};
    use crate::net::types::OutboundEvent;

    #[wasm_bindgen(typescript_custom_section)]
    const TS_APPEND_CONTENT: &'static str = r#"
export interface ChatSocket {
    on(event: string, handler: (payload: any) => void): void
    emit(event: string, payload: any): void
}
"#;

    #[wasm_bindgen]
    extern "C" {
        /// Host-provided socket.io style connection.
        #[wasm_bindgen(typescript_type = "ChatSocket")]
        pub type Socket;

        #[wasm_bindgen(method)]
        pub fn on(this: &Socket, event: &str, handler: &js_sys::Function);

        #[wasm_bindgen(method, catch)]
        fn emit(this: &Socket, event: &str, payload: JsValue) -> Result<(), JsValue>;
    }

    /// [`Channel`] backed by the host [`Socket`].
    pub struct SocketChannel {
        socket: Socket,
    }

    impl SocketChannel {
        pub fn new(socket: Socket) -> Self {
            Self { socket }
        }
    }

    impl Channel for SocketChannel {
        fn emit(&self, event: &OutboundEvent) -> Result<(), ChannelError> {
            let name = event.name().as_str();
            let payload = event
                .serialize(&Serializer::json_compatible())
                .map_err(|err| ChannelError::Encode { event: name, reason: err.to_string() })?;
            self.socket
                .emit(name, payload)
                .map_err(|err| ChannelError::Emit { event: name, reason: format!("{err:?}") })
        }
    }

    /// Convert a JS payload into JSON. `null` and `undefined` become
    /// [`serde_json::Value::Null`].
    ///
    /// # Errors
    ///
    /// Fails for values with no JSON form, such as functions or symbols.
    pub fn js_to_json(value: &JsValue) -> Result<serde_json::Value, serde_wasm_bindgen::Error> {
        serde_wasm_bindgen::from_value(value.clone())
    }
}
