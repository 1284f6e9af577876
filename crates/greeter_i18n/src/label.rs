use std::borrow::Cow;

/// A bundle key.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: Cow<'static, str>,
}

impl Message {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self { id: id.into() }
    }
}

/// Text shown by a view node: either fixed text or a bundle key.
///
/// Option labels such as `English` are `Raw` because they are displayed
/// in their own language regardless of the active locale.
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    Raw(Cow<'static, str>),
    Msg(Message),
}

impl Label {
    pub fn raw(s: impl Into<Cow<'static, str>>) -> Self {
        Self::Raw(s.into())
    }

    pub fn msg(m: Message) -> Self {
        Self::Msg(m)
    }
}
