use inner::doc_inline_reexport;

doc_inline_reexport! {
    disc_intersection,
    max_product_of_three,
    triangle,
}
