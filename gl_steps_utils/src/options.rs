/// `unwrap` for values the caller has already proven to be present,
/// e.g. enum conversions of codes handed back by the driver.
pub trait OptExt {
    type T;
    fn unwrap_unreach(self) -> Self::T;
}

impl<T> OptExt for Option<T> {
    type T = T;

    #[track_caller]
    fn unwrap_unreach(self) -> Self::T {
        self.unwrap_or_else(|| unreachable!("value was proven present"))
    }
}

impl<T, E> OptExt for Result<T, E> {
    type T = T;

    #[track_caller]
    fn unwrap_unreach(self) -> Self::T {
        self.unwrap_or_else(|_| unreachable!("value was proven ok"))
    }
}
