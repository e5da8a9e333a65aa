//! Document Encoding
//!
//! Converts file bytes into the data-URL form the backend stores for NID and
//! KYC document images.

use wasm_bindgen::JsCast;

/// Encode file bytes as a `data:` URL suitable for JSON transport
pub fn data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, base64_encode(data))
}

/// Read a browser `File` and hand its data-URL encoding to `on_done`
pub fn read_file_as_data_url(file: &web_sys::File, on_done: impl Fn(String) + 'static) {
    let mime = file.type_();
    let file_reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(_) => return,
    };

    let onload = {
        let file_reader = file_reader.clone();
        wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(result) = file_reader.result() {
                if let Some(array_buffer) = result.dyn_ref::<js_sys::ArrayBuffer>() {
                    let uint8_array = js_sys::Uint8Array::new(array_buffer);
                    on_done(data_url(&mime, &uint8_array.to_vec()));
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let _ = file_reader.read_as_array_buffer(file);
}

/// Simple base64 encoding for binary data
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    let mut i = 0;

    while i < data.len() {
        let b0 = data[i] as usize;
        let b1 = if i + 1 < data.len() { data[i + 1] as usize } else { 0 };
        let b2 = if i + 2 < data.len() { data[i + 2] as usize } else { 0 };

        result.push(ALPHABET[b0 >> 2] as char);
        result.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);

        if i + 1 < data.len() {
            result.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
        } else {
            result.push('=');
        }

        if i + 2 < data.len() {
            result.push(ALPHABET[b2 & 0x3f] as char);
        } else {
            result.push('=');
        }

        i += 3;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_known_vectors() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_encode(b"f"), "Zg==");
        assert_eq!(base64_encode(b"fo"), "Zm8=");
        assert_eq!(base64_encode(b"foo"), "Zm9v");
        assert_eq!(base64_encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_data_url_shape() {
        let url = data_url("image/png", b"foo");
        assert_eq!(url, "data:image/png;base64,Zm9v");
    }

    #[test]
    fn test_data_url_empty_payload() {
        assert_eq!(data_url("image/jpeg", b""), "data:image/jpeg;base64,");
    }
}
