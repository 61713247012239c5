use inner::doc_inline_reexport;

doc_inline_reexport! {
    brackets,
    fish,
    stone_wall,
}
