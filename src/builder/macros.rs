//! Macros for ergonomic symptom sets.

/// Build a [`Symptoms`](crate::status::Symptoms) set from variant names.
///
/// # Example
///
/// ```
/// use isolation_status::status::Symptom;
/// use isolation_status::symptoms;
///
/// let reported = symptoms![Cough, Temperature];
/// assert!(reported.contains(&Symptom::Temperature));
/// assert!(symptoms![].is_empty());
/// ```
#[macro_export]
macro_rules! symptoms {
    () => {
        $crate::status::Symptoms::new()
    };
    ($($symptom:ident),+ $(,)?) => {{
        let mut set = $crate::status::Symptoms::new();
        $(set.insert($crate::status::Symptom::$symptom);)+
        set
    }};
}

#[cfg(test)]
mod tests {
    use crate::status::{Symptom, Symptoms};

    #[test]
    fn symptoms_macro_builds_set() {
        let set = symptoms![Temperature, Cough, Temperature];
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Symptom::Cough));
    }

    #[test]
    fn symptoms_macro_supports_trailing_comma_and_empty() {
        let set = symptoms![Cough,];
        assert_eq!(set, [Symptom::Cough].into_iter().collect::<Symptoms>());
        let empty: Symptoms = symptoms![];
        assert!(empty.is_empty());
    }
}
