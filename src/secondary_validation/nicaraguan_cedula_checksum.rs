use crate::secondary_validation::Validator;
use crate::validation::validate;

pub struct NicaraguanCedulaChecksum;

impl Validator for NicaraguanCedulaChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        /*
         * Nicaraguan cédula format, hyphens optional:
         * PPP-DDMMYY-SSSSL
         * 3 digit municipality code, DDMMYY birth date, 4 digit sequence number
         * and a check letter. The letter is the 13 digit number modulo 23, used
         * as an index into "ABCDEFGHJKLMNPQRSTUVWXY".
         */
        validate(regex_match).is_ok()
    }
}
