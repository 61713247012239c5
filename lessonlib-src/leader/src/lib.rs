use inner::doc_inline_reexport;

doc_inline_reexport! {
    majority_vote,
}
