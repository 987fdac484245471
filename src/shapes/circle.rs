use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle. The radius must be finite and strictly positive.
    pub fn new(radius: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            radius: validate_radius(radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replaces the radius. On error the circle is left unchanged.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ValidationError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }
}

fn validate_radius(radius: f64) -> Result<f64, ValidationError> {
    if !radius.is_finite() {
        return Err(ValidationError::NonFiniteRadius);
    }
    if radius <= 0.0 {
        return Err(ValidationError::NonPositiveRadius(radius));
    }
    Ok(radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0).unwrap();
        assert_eq!(c.radius(), 5.0);
    }

    #[test]
    fn test_circle_rejects_bad_radius() {
        assert_eq!(Circle::new(0.0), Err(ValidationError::NonPositiveRadius(0.0)));
        assert_eq!(Circle::new(-1.0), Err(ValidationError::NonPositiveRadius(-1.0)));
        assert_eq!(Circle::new(f64::NAN), Err(ValidationError::NonFiniteRadius));
        assert_eq!(Circle::new(f64::INFINITY), Err(ValidationError::NonFiniteRadius));
    }

    #[test]
    fn test_set_radius() {
        let mut c = Circle::new(1.0).unwrap();
        c.set_radius(2.5).unwrap();
        assert_eq!(c.radius(), 2.5);

        assert!(c.set_radius(-3.0).is_err());
        assert_eq!(c.radius(), 2.5);
    }
}
