#[cfg(test)]
pub mod common;

#[cfg(test)]
mod test_award_xp;
