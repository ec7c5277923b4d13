use crate::errors::EsgriskError;
use crate::scoring::WeightConfig;

/// Validated, immutable input for one assessment run. Built once from CLI
/// or config input; no ambient state drives the pipeline.
#[derive(Debug, Clone)]
pub struct AssessmentRequest {
    pub material: String,
    pub supplier: Option<String>,
    pub weights: WeightConfig,
}

impl AssessmentRequest {
    /// Single-supplier assessment: both supplier and material required.
    pub fn for_supplier(
        supplier: &str,
        material: &str,
        weights: WeightConfig,
    ) -> Result<Self, EsgriskError> {
        let supplier = supplier.trim();
        if supplier.is_empty() {
            return Err(EsgriskError::InvalidInput("Supplier name is required".into()));
        }
        Ok(Self {
            material: required_material(material)?,
            supplier: Some(supplier.to_string()),
            weights,
        })
    }

    /// Material-only discovery: suppliers come from entity extraction.
    pub fn for_material(material: &str, weights: WeightConfig) -> Result<Self, EsgriskError> {
        Ok(Self {
            material: required_material(material)?,
            supplier: None,
            weights,
        })
    }

    /// Search query for this request, per flow.
    pub fn query(&self) -> String {
        match &self.supplier {
            Some(supplier) => format!(
                "{} {} ESG human rights labor environment governance",
                supplier, self.material
            ),
            None => format!(
                "{} ESG supplier mining ethics human rights environment",
                self.material
            ),
        }
    }
}

fn required_material(material: &str) -> Result<String, EsgriskError> {
    let material = material.trim();
    if material.is_empty() {
        return Err(EsgriskError::InvalidInput("Material name is required".into()));
    }
    Ok(material.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_request_query() {
        let request =
            AssessmentRequest::for_supplier("Glencore", "cobalt", WeightConfig::default()).unwrap();
        assert_eq!(
            request.query(),
            "Glencore cobalt ESG human rights labor environment governance"
        );
    }

    #[test]
    fn test_material_request_query() {
        let request = AssessmentRequest::for_material("lithium", WeightConfig::default()).unwrap();
        assert_eq!(
            request.query(),
            "lithium ESG supplier mining ethics human rights environment"
        );
    }

    #[test]
    fn test_blank_inputs_rejected() {
        let weights = WeightConfig::default();
        assert!(AssessmentRequest::for_supplier("  ", "cobalt", weights).is_err());
        assert!(AssessmentRequest::for_supplier("Glencore", "", weights).is_err());
        assert!(AssessmentRequest::for_material("  ", weights).is_err());
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let request =
            AssessmentRequest::for_supplier(" Glencore ", " cobalt ", WeightConfig::default())
                .unwrap();
        assert_eq!(request.supplier.as_deref(), Some("Glencore"));
        assert_eq!(request.material, "cobalt");
    }
}
