use serde::{Deserialize, Serialize};

/// The four quantities of a right triangle, named relative to the acute angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Angle,
    Opposite,
    Adjacent,
    Hypotenuse,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Angle,
        Field::Opposite,
        Field::Adjacent,
        Field::Hypotenuse,
    ];

    /// Stable key shared by the JSON format and the page's element ids.
    pub fn key(self) -> &'static str {
        match self {
            Field::Angle => "angle",
            Field::Opposite => "opposite",
            Field::Adjacent => "adjacent",
            Field::Hypotenuse => "hypotenuse",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Known values supplied for one solve request. `None` means the slot was
/// left empty, which is not the same as a supplied zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleInputs {
    /// Acute angle in degrees.
    pub angle: Option<f64>,
    pub opposite: Option<f64>,
    pub adjacent: Option<f64>,
    pub hypotenuse: Option<f64>,
}

impl TriangleInputs {
    pub fn new(
        angle: Option<f64>,
        opposite: Option<f64>,
        adjacent: Option<f64>,
        hypotenuse: Option<f64>,
    ) -> Self {
        TriangleInputs {
            angle,
            opposite,
            adjacent,
            hypotenuse,
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Angle => self.angle,
            Field::Opposite => self.opposite,
            Field::Adjacent => self.adjacent,
            Field::Hypotenuse => self.hypotenuse,
        }
    }

    /// Fields that carry a value, in `Field::ALL` order.
    pub fn present(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |f| self.get(*f).is_some())
    }
}

/// One computed quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Derived {
    pub field: Field,
    pub value: f64,
}

/// The two quantities that were missing from the inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriangleOutputs {
    pub derived: [Derived; 2],
}

impl TriangleOutputs {
    pub(crate) fn pair(first: (Field, f64), second: (Field, f64)) -> Self {
        TriangleOutputs {
            derived: [
                Derived {
                    field: first.0,
                    value: first.1,
                },
                Derived {
                    field: second.0,
                    value: second.1,
                },
            ],
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.derived
            .iter()
            .find(|d| d.field == field)
            .map(|d| d.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Derived> {
        self.derived.iter()
    }

    /// Merge the derived values back into the inputs they were computed from,
    /// giving a fully populated triangle.
    pub fn complete(&self, inputs: &TriangleInputs) -> TriangleInputs {
        let mut full = *inputs;
        for d in &self.derived {
            let slot = match d.field {
                Field::Angle => &mut full.angle,
                Field::Opposite => &mut full.opposite,
                Field::Adjacent => &mut full.adjacent,
                Field::Hypotenuse => &mut full.hypotenuse,
            };
            *slot = Some(d.value);
        }
        full
    }
}
