//! Tests for boleto identifiers

use core_kernel::BoletoId;
use uuid::Uuid;

mod boleto_id_tests {
    use super::*;

    #[test]
    fn test_new_v7_generates_unique_ids() {
        let ids: Vec<BoletoId> = (0..16).map(|_| BoletoId::new_v7()).collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display_carries_a_version_7_uuid() {
        let display = BoletoId::new_v7().to_string();

        let suffix = display.strip_prefix("BOL-").unwrap();
        let uuid = Uuid::parse_str(suffix).unwrap();
        assert_eq!(uuid.get_version_num(), 7);
    }

    #[test]
    fn test_copies_compare_equal() {
        let id = BoletoId::new_v7();
        let copy = id;
        assert_eq!(id, copy);
        assert_eq!(id.to_string(), copy.to_string());
    }
}
