//! Reframe WASM - WebAssembly bindings for Reframe
//!
//! This crate exposes the reframe-core transform pipeline to
//! JavaScript/TypeScript.
//!
//! # Usage
//!
//! ```typescript
//! import init, { transform } from '@reframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const thumb = transform(bytes, { width: 200, height: 200 });
//! ```

use wasm_bindgen::prelude::*;

mod transform;

pub use transform::{resize_params, transform};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
