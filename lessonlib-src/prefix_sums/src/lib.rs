use inner::doc_inline_reexport;

doc_inline_reexport! {
    count_div,
    genomic_range_query,
    min_avg_two_slice,
    passing_cars,
}
