use serde::{Deserialize, Serialize};

// Academic branch, fixed enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Branch {
    CSE,
    ECE,
    ME,
    CE,
    IT,
    EEE,
    AI,
    DS,
}

impl Branch {
    pub const ALL: [Branch; 8] = [
        Branch::CSE,
        Branch::ECE,
        Branch::ME,
        Branch::CE,
        Branch::IT,
        Branch::EEE,
        Branch::AI,
        Branch::DS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::CSE => "CSE",
            Branch::ECE => "ECE",
            Branch::ME => "ME",
            Branch::CE => "CE",
            Branch::IT => "IT",
            Branch::EEE => "EEE",
            Branch::AI => "AI",
            Branch::DS => "DS",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CSE" => Ok(Branch::CSE),
            "ECE" => Ok(Branch::ECE),
            "ME" => Ok(Branch::ME),
            "CE" => Ok(Branch::CE),
            "IT" => Ok(Branch::IT),
            "EEE" => Ok(Branch::EEE),
            "AI" => Ok(Branch::AI),
            "DS" => Ok(Branch::DS),
            _ => Err(format!(
                "Invalid branch: '{s}'. Supported branches: CSE, ECE, ME, CE, IT, EEE, AI, DS"
            )),
        }
    }
}

// Student roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub student_name: String,
    pub uid: String,
    pub branch: Branch,
    pub roll_no: i32,
    pub student_phone: String,
    pub parent_phone: String,
    pub year: i32,
    pub admission_year: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_branch_round_trip() {
        for branch in Branch::ALL {
            assert_eq!(Branch::from_str(branch.as_str()).unwrap(), branch);
        }
        assert!(Branch::from_str("XX").is_err());
        assert!(Branch::from_str("cse").is_err()); // callers uppercase first
    }

    #[test]
    fn test_branch_serializes_as_uppercase_string() {
        assert_eq!(serde_json::to_string(&Branch::CSE).unwrap(), "\"CSE\"");
    }
}
