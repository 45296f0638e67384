//! Cross-crate tests: snapshots go in through the JSON adapter or the model builders and come
//! out as classified maps and summaries.

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod classification;

#[cfg(test)]
mod snapshot;

#[cfg(test)]
mod summary;
