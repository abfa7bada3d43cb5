//! Pointer-type substitution
//!
//! Every pointer declaration and named function-pointer alias listed in
//! [`POINTER_TYPES`] is rewritten to a fixed-width scalar so the struct has the
//! same layout on a 32-bit device as it is described with on a 64-bit host.

/// Source spellings rewritten to the destination type, applied in order
///
/// Each token is fully substituted across the text before the next one is
/// tried. No entry may be produced by substituting an earlier one.
pub const POINTER_TYPES: &[&str] = &[
    "uint32_t *",
    "uint64_t *",
    "uint16_t *",
    "uint8_t *",
    "void **",
    "nnc_log_fp",
    "nnc_exit_fp",
    "nnc_pmu_set",
    "nnc_err_fatal_fp",
    "nnc_notify_hang_fp",
    "nnc_udma_read_fp",
    "nnc_mmap_fp",
    "nnc_munmap_fp",
    "nnc_pmu_get",
    "SemaphoreInfo *",
    "nnc_reprog_mcid_fp",
    "dlopen_fp",
    "dlopenbuf_fp",
    "dlclose_fp",
    "dlsym_fp",
    "dladdr_fp",
    "dlerror_fp",
    "dlinfo_fp",
];

/// Replace every pointer-type token in `struct_text` with `destination_type`
///
/// Each match becomes the destination type followed by exactly one space.
/// Spaces or tabs that followed the matched token are absorbed, so both
/// `uint32_t *a` and `nnc_log_fp log` come out as `T a` / `T log`.
pub fn substitute_pointer_types(struct_text: &str, destination_type: &str) -> String {
    let replacement = format!("{destination_type} ");
    POINTER_TYPES.iter().fold(struct_text.to_owned(), |text, token| {
        replace_token(&text, token, &replacement)
    })
}

fn replace_token(text: &str, token: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut count = 0usize;

    while let Some(pos) = rest.find(token) {
        out.push_str(&rest[..pos]);
        out.push_str(replacement);
        rest = rest[pos + token.len()..].trim_start_matches(|c: char| c == ' ' || c == '\t');
        count += 1;
    }
    out.push_str(rest);

    if count > 0 {
        tracing::debug!(token, count, "substituted pointer type");
    }
    out
}
