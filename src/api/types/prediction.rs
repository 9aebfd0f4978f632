//! Prediction request and response bodies

use serde::{Deserialize, Serialize};

use crate::domain::{Indication, PredictionResult, RiskLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub disease_type: String,
    pub symptoms: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_disease: String,
    pub risk_level: RiskLevel,
    pub confidence: String,
    pub indication: Indication,
}

impl PredictionResponse {
    pub fn from_domain(result: &PredictionResult) -> Self {
        Self {
            predicted_disease: result.predicted_disease.to_string(),
            risk_level: result.risk_level,
            confidence: result.confidence.clone(),
            indication: result.indication,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DiseaseKey, RiskThresholds};

    #[test]
    fn test_request_deserialization() {
        let request: PredictionRequest =
            serde_json::from_str(r#"{"disease_type":"heart","symptoms":[63,1,3,145]}"#).unwrap();

        assert_eq!(request.disease_type, "heart");
        assert_eq!(request.symptoms, vec![63.0, 1.0, 3.0, 145.0]);
    }

    #[test]
    fn test_request_rejects_non_numeric_symptom() {
        let result =
            serde_json::from_str::<PredictionRequest>(r#"{"disease_type":"heart","symptoms":["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_hides_probability() {
        let result =
            PredictionResult::new(DiseaseKey::Parkinson, 0.5, None, &RiskThresholds::default());
        let json = serde_json::to_value(PredictionResponse::from_domain(&result)).unwrap();

        assert_eq!(json["predicted_disease"], "Parkinson's Risk Assessment");
        assert_eq!(json["risk_level"], "Medium");
        assert_eq!(json["confidence"], "50.0%");
        assert_eq!(json["indication"], "Positive");
        assert!(json.get("probability").is_none());
    }
}
