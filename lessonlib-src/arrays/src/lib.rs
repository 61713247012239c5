use inner::doc_inline_reexport;

doc_inline_reexport! {
    cyclic_rotation,
    odd_occurrences,
}
