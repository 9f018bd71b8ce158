use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Wedding,
    Corporate,
    Birthday,
    Catering,
    Public,
    Launch,
    Interior,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::Wedding,
        EventType::Corporate,
        EventType::Birthday,
        EventType::Catering,
        EventType::Public,
        EventType::Launch,
        EventType::Interior,
        EventType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Birthday => "birthday",
            EventType::Catering => "catering",
            EventType::Public => "public",
            EventType::Launch => "launch",
            EventType::Interior => "interior",
            EventType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate Event",
            EventType::Birthday => "Birthday",
            EventType::Catering => "Event Catering",
            EventType::Public => "Public Meeting",
            EventType::Launch => "Product Launch",
            EventType::Interior => "Interior Design",
            EventType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    EventType,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::EventType => "event type",
            Field::Message => "message",
        }
    }
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<Field>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub message: String,
}

impl ContactForm {
    pub fn with_field(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
            Field::EventType => next.event_type = value,
            Field::Message => next.message = value,
        }
        next
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Phone, &self.phone),
            (Field::EventType, &self.event_type),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Presence check only; the message is optional.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}
