use inner::doc_inline_reexport;

doc_inline_reexport! {
    builder_hook,
    looking_glass,
}
