pub(crate) struct Vector2<A> {
    v: Vec<A>,
    bounds: Vec<usize>,
}

impl<A> Vector2<A> {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Vector2 {
            v: Vec::new(),
            bounds: vec![0],
        }
    }
    pub(crate) fn len(&self) -> usize {
        self.bounds.len() - 1
    }
    pub(crate) fn total(&self) -> usize {
        self.v.len()
    }
    pub(crate) fn with_capacities(total: usize, n: usize) -> Self {
        let mut bounds = Vec::with_capacity(n + 1);
        bounds.push(0);
        Vector2 {
            v: Vec::with_capacity(total),
            bounds,
        }
    }
    pub(crate) fn push_to_last(&mut self, a: A) {
        assert!(self.bounds.len() > 1);
        if let Some(last) = self.bounds.last_mut() {
            *last += 1
        }
        self.v.push(a)
    }
    pub(crate) fn push(&mut self) {
        self.bounds.push(self.v.len())
    }
}

impl<A> std::ops::Index<usize> for Vector2<A> {
    type Output = [A];
    fn index(&self, i: usize) -> &[A] {
        &self.v[self.bounds[i]..self.bounds[i + 1]]
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Vector2<A> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "[")?;
        for i in 0..self.bounds.len() - 1 {
            if i > 0 {
                write!(fmt, ", ")?
            }
            write!(fmt, "{:?}", &self[i])?
        }
        write!(fmt, "]")?;
        Ok(())
    }
}

#[test]
fn test_rows() {
    let mut v: Vector2<usize> = Vector2::new();
    v.push();
    v.push_to_last(0);
    v.push_to_last(1);
    v.push();
    v.push();
    v.push_to_last(4);
    assert_eq!(v.len(), 3);
    assert_eq!(v.total(), 3);
    assert_eq!(&v[0], &[0, 1][..]);
    assert!(v[1].is_empty());
    assert_eq!(&v[2], &[4][..]);
}

#[test]
#[should_panic]
fn test_no_row() {
    let mut w: Vector2<usize> = Vector2::new();
    w.push_to_last(1);
}
