mod notify;

pub(super) use notify::notify;
