use inner::doc_inline_reexport;

doc_inline_reexport! {
    frog_jmp,
    perm_missing_elem,
    tape_equilibrium,
}
