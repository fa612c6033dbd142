pub(crate) mod fakes;
