use smallvec::SmallVec;

pub type Alternatives = SmallVec<[Box<str>; 4]>;
pub type MatchList<'t> = Vec<&'t str>;
