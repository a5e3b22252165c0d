//! C-ABI FFI bindings for host-application integration.
//!
//! Exposes the export entry points to languages such as C#, Python, and
//! Node.js. Enabled with the `ffi` feature.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::{export_document, Audience, ExportOptions};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct MarkpageResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Error message (null if succeeded). Must be freed with
    /// `markpage_free_string`.
    pub error: *mut c_char,
}

impl MarkpageResult {
    fn ok() -> Self {
        Self {
            success: true,
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

unsafe fn arg<'a>(ptr: *const c_char, name: &str) -> std::result::Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{name} cannot be null"));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| format!("{name} is not valid UTF-8"))
}

unsafe fn export_for(
    audience: Audience,
    text: *const c_char,
    title: *const c_char,
    output_path: *const c_char,
) -> MarkpageResult {
    let (text, title, output_path) = match (
        arg(text, "text"),
        arg(title, "title"),
        arg(output_path, "output_path"),
    ) {
        (Ok(t), Ok(ti), Ok(o)) => (t, ti, o),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => return MarkpageResult::error(e),
    };

    let source = match audience.select_source(text) {
        Some(source) => source,
        None => return MarkpageResult::error("No content to export".to_string()),
    };
    let options = ExportOptions::for_audience(audience);
    match export_document(&source, title, output_path, &options) {
        Ok(()) => MarkpageResult::ok(),
        Err(e) => MarkpageResult::error(e.to_string()),
    }
}

/// Export the student view of tagged markdown text to a PDF file.
///
/// # Safety
///
/// All pointers must be valid null-terminated UTF-8 strings. The returned
/// result must be freed with `markpage_free_result`.
#[no_mangle]
pub unsafe extern "C" fn markpage_export_student(
    text: *const c_char,
    title: *const c_char,
    output_path: *const c_char,
) -> MarkpageResult {
    export_for(Audience::Student, text, title, output_path)
}

/// Export the teacher view of tagged markdown text to a PDF file.
///
/// # Safety
///
/// All pointers must be valid null-terminated UTF-8 strings. The returned
/// result must be freed with `markpage_free_result`.
#[no_mangle]
pub unsafe extern "C" fn markpage_export_teacher(
    text: *const c_char,
    title: *const c_char,
    output_path: *const c_char,
) -> MarkpageResult {
    export_for(Audience::Teacher, text, title, output_path)
}

/// Free a string allocated by this library.
///
/// # Safety
///
/// `s` must have been produced by this library and not freed before.
#[no_mangle]
pub unsafe extern "C" fn markpage_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Free a result returned by this library.
///
/// # Safety
///
/// `result` fields must not have been freed individually before.
#[no_mangle]
pub unsafe extern "C" fn markpage_free_result(result: MarkpageResult) {
    markpage_free_string(result.error);
}
