//! Bracket matching. Characters other than brackets are ignored.

fn opener(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Checks `()`, `[]` and `{}` with an explicit stack.
pub fn properly_nested(s: &str) -> bool {
    let mut stack = vec![];
    for c in s.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            _ => {
                if let Some(open) = opener(c) {
                    if stack.pop() != Some(open) {
                        return false;
                    }
                }
            }
        }
    }
    stack.is_empty()
}

/// Checks `()` only; a depth counter is enough.
pub fn nested_parens(s: &str) -> bool {
    let mut depth = 0_usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[test]
fn sanity_check() {
    assert!(properly_nested("{[()()]}"));
    assert!(!properly_nested("([)()]"));
    assert!(properly_nested(""));
    assert!(!properly_nested("(("));
    assert!(!properly_nested("}"));
    assert!(properly_nested("f(x[0]) { y }"));

    assert!(nested_parens("(()(())())"));
    assert!(!nested_parens("())"));
    assert!(!nested_parens(")("));
    assert!(nested_parens(""));
    assert!(nested_parens("(a)(b)"));
}
