//! FFI interface for host applications
//!
//! Provides C-compatible functions for running the extraction engine.
//! Options and results cross the boundary as JSON strings.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::options::ParseOptions;
use crate::parser::parse_with_options;
use crate::patterns::classify_site;

/// Result struct returned to the host
/// Both pointers are owned by Rust and must be freed via free_listing_result
#[repr(C)]
pub struct ListingResultFFI {
    /// JSON-serialized result (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message if the call failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract a listing from pasted HTML.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
/// * `options_json` - JSON-serialized ParseOptions (null-terminated), or null for defaults
///
/// # Returns
/// ListingResultFFI with either json_ptr set (success) or error_ptr set (failure).
/// Extraction itself cannot fail; errors only come from bad arguments.
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - `options_json` must be null or a valid null-terminated C string
/// - Caller must free the result via `free_listing_result`
#[no_mangle]
pub unsafe extern "C" fn parse_listing_html(
    html_ptr: *const c_char,
    html_len: usize,
    options_json: *const c_char,
) -> ListingResultFFI {
    let html = read_html(html_ptr, html_len);

    let options = if options_json.is_null() {
        ParseOptions::default()
    } else {
        let options_str = match CStr::from_ptr(options_json).to_str() {
            Ok(s) => s,
            Err(_) => return make_error_result("Invalid UTF-8 in options JSON"),
        };
        match serde_json::from_str::<ParseOptions>(options_str) {
            Ok(o) => o,
            Err(e) => {
                return make_error_result(&format!("Failed to parse options JSON: {}", e));
            }
        }
    };

    let result = parse_with_options(&html, &options);
    make_json_result(&result)
}

/// Pattern-set key the page would be extracted with, as a JSON string
///
/// # Safety
/// Same as parse_listing_html
#[no_mangle]
pub unsafe extern "C" fn classify_site_ffi(html_ptr: *const c_char, html_len: usize) -> ListingResultFFI {
    let html = read_html(html_ptr, html_len);
    make_json_result(&classify_site(&html).key)
}

/// Free a ListingResultFFI returned by this module
///
/// # Safety
/// - `result` must have been returned by a function in this module
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_listing_result(result: ListingResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

// Invalid UTF-8 is replaced rather than rejected; extraction accepts any text
unsafe fn read_html(html_ptr: *const c_char, html_len: usize) -> String {
    if html_ptr.is_null() || html_len == 0 {
        return String::new();
    }
    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    String::from_utf8_lossy(slice).into_owned()
}

fn make_json_result<T: serde::Serialize + ?Sized>(value: &T) -> ListingResultFFI {
    match serde_json::to_string(value) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => ListingResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&format!("Failed to serialize result: {}", e)),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> ListingResultFFI {
    let error_cstr = CString::new(msg).unwrap_or_else(|_| CString::from(c"Unknown error"));
    ListingResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    unsafe fn take_json(result: ListingResultFFI) -> Value {
        assert!(result.error_ptr.is_null());
        let json = CStr::from_ptr(result.json_ptr).to_str().unwrap().to_string();
        free_listing_result(result);
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_parse_listing_html_ffi() {
        let html = r#"<html><body><h1>Palm Grove Villas</h1><img src="/a.jpg"></body></html>"#;
        let options = CString::new(r#"{"manualBaseUrl": "https://ex.com"}"#).unwrap();

        let value = unsafe {
            take_json(parse_listing_html(
                html.as_ptr() as *const c_char,
                html.len(),
                options.as_ptr(),
            ))
        };

        assert_eq!(value["name"], "Palm Grove Villas");
        assert_eq!(value["imageUrls"][0], "https://ex.com/a.jpg");
        assert_eq!(value["type"], "RESIDENTIAL");
    }

    #[test]
    fn test_null_inputs() {
        let value = unsafe { take_json(parse_listing_html(ptr::null(), 0, ptr::null())) };
        assert_eq!(value["confidence"], 20);
    }

    #[test]
    fn test_bad_options_json() {
        let html = "<p>x</p>";
        let options = CString::new("{not json").unwrap();
        let result =
            unsafe { parse_listing_html(html.as_ptr() as *const c_char, html.len(), options.as_ptr()) };

        assert!(result.json_ptr.is_null());
        let msg = unsafe { CStr::from_ptr(result.error_ptr) }.to_str().unwrap().to_string();
        assert!(msg.starts_with("Failed to parse options JSON"));
        unsafe { free_listing_result(result) };
    }

    #[test]
    fn test_classify_site_ffi() {
        let html = "<p>magicbricks</p>";
        let value =
            unsafe { take_json(classify_site_ffi(html.as_ptr() as *const c_char, html.len())) };
        assert_eq!(value, "magicbricks");
    }
}
