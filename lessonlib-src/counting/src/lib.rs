use inner::doc_inline_reexport;

doc_inline_reexport! {
    frog_river_one,
    max_counters,
    missing_integer,
    perm_check,
}
