/// Represents a time duration in seconds.
pub type Duration = f64;

/// Represents a timestamp as seconds since midnight.
pub type Timestamp = f64;

/// Represents a distance.
pub type Distance = f64;

/// Specifies location type: an index into the canonical address list which
/// is also used to index rows and columns of the distance matrix.
pub type Location = usize;
