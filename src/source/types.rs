use std::fmt;

/// Element type of a dataset, with the size in bytes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Datatype {
    UInt(usize),
    Int(usize),
    Float(usize),
    Custom(usize),
}

impl Datatype {
    pub fn dsize(&self) -> usize {
        use Datatype::*;

        match self {
            UInt(sz) | Int(sz) | Float(sz) | Custom(sz) => *sz,
        }
    }

    /// Whether the values can be read as `f64` for plotting.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Datatype::Custom(_))
    }
}

impl From<hdf5::Datatype> for Datatype {
    fn from(dtype: hdf5::Datatype) -> Self {
        match dtype {
            _ if dtype.is::<u8>() => Datatype::UInt(dtype.size()),
            _ if dtype.is::<u16>() => Datatype::UInt(dtype.size()),
            _ if dtype.is::<u32>() => Datatype::UInt(dtype.size()),
            _ if dtype.is::<u64>() => Datatype::UInt(dtype.size()),
            _ if dtype.is::<i8>() => Datatype::Int(dtype.size()),
            _ if dtype.is::<i16>() => Datatype::Int(dtype.size()),
            _ if dtype.is::<i32>() => Datatype::Int(dtype.size()),
            _ if dtype.is::<i64>() => Datatype::Int(dtype.size()),
            _ if dtype.is::<f32>() => Datatype::Float(dtype.size()),
            _ if dtype.is::<f64>() => Datatype::Float(dtype.size()),
            _ => Datatype::Custom(dtype.size()),
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Datatype::*;

        match self {
            UInt(sz) => write!(f, "u{}", sz * 8),
            Int(sz) => write!(f, "i{}", sz * 8),
            Float(sz) => write!(f, "f{}", sz * 8),
            Custom(sz) => write!(f, "custom({sz} bytes)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_native() {
        let dt = hdf5::Datatype::from_type::<f32>().unwrap();
        assert_eq!(Datatype::from(dt), Datatype::Float(4));

        let dt = hdf5::Datatype::from_type::<i16>().unwrap();
        assert_eq!(Datatype::from(dt), Datatype::Int(2));

        let dt = hdf5::Datatype::from_type::<u64>().unwrap();
        assert_eq!(Datatype::from(dt), Datatype::UInt(8));

        let dt = hdf5::Datatype::from_type::<bool>().unwrap();
        let dt = Datatype::from(dt);
        assert!(!dt.is_numeric());
    }

    #[test]
    fn display() {
        assert_eq!(Datatype::Float(8).to_string(), "f64");
        assert_eq!(Datatype::UInt(1).to_string(), "u8");
        assert_eq!(Datatype::Custom(3).to_string(), "custom(3 bytes)");
    }
}
