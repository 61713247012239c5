use inner::doc_inline_reexport;

doc_inline_reexport! {
    pair_discs,
    split_wall,
    tally_majority,
}
