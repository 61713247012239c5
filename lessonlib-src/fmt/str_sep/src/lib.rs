use std::fmt;

pub struct SpaceSep<I>(pub I);
pub struct StrSep<'a, I>(pub I, pub &'a str);

fn join<I, T: fmt::Display>(
    iter: I,
    sep: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    I: IntoIterator<Item = T>,
{
    let mut iter = iter.into_iter();
    if let Some(first) = iter.next() {
        first.fmt(f)?;
    }
    iter.try_for_each(|rest| {
        f.write_str(sep)?;
        rest.fmt(f)
    })
}

impl<I, T: fmt::Display> fmt::Display for SpaceSep<I>
where
    I: IntoIterator<Item = T> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(self.0.clone(), " ", f)
    }
}

impl<I, T: fmt::Display> fmt::Display for StrSep<'_, I>
where
    I: IntoIterator<Item = T> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(self.0.clone(), self.1, f)
    }
}

#[test]
fn sanity_check() {
    assert_eq!(format!("{}", SpaceSep(&[1, 2, 3])), "1 2 3");
    assert_eq!(format!("{}", StrSep(&[1, 2, 3], ", ")), "1, 2, 3");
    assert_eq!(format!("{}", SpaceSep(Vec::<u8>::new())), "");
    assert_eq!(format!("{}", StrSep(vec!["a"], "-")), "a");
}
