use super::*;
use crate::common::FftError;
use alloc::vec;

#[test]
fn test_real_to_complex() {
    assert_eq!(real_to_complex(&[1.0, -2.0, 3.5]), vec![1.0, 0.0, -2.0, 0.0, 3.5, 0.0]);
    assert!(real_to_complex(&[]).is_empty());
}

#[test]
fn test_real_to_complex_into() {
    let mut storage = vec![9.0; 4];
    real_to_complex_into(&[1.0, 2.0], &mut storage).unwrap();
    assert_eq!(storage, vec![1.0, 0.0, 2.0, 0.0]);

    let mut storage = vec![9.0; 3];
    assert_eq!(real_to_complex_into(&[1.0, 2.0], &mut storage), Err(FftError::SizeMismatch));
    assert_eq!(storage, vec![9.0; 3]);
}

#[test]
fn test_complex_to_real() {
    assert_eq!(complex_to_real(&[1.0, 5.0, 2.0, 6.0, 3.0, 7.0]), vec![1.0, 2.0, 3.0]);

    let mut storage = vec![0.0; 2];
    complex_to_real_into(&[4.0, 1.0, -4.0, 1.0], &mut storage).unwrap();
    assert_eq!(storage, vec![4.0, -4.0]);

    assert_eq!(complex_to_real_into(&[1.0, 2.0, 3.0], &mut storage), Err(FftError::SizeMismatch));
    assert_eq!(complex_to_real_into(&[1.0, 2.0], &mut storage), Err(FftError::SizeMismatch));
}

#[test]
fn test_plan_buffers() {
    let plan = FftPlan::new(8).unwrap();
    let buffer = plan.allocate_complex();
    assert_eq!(buffer.len(), 16);
    assert!(buffer.iter().all(|&v| v == 0.0));

    let widened = plan.to_complex(&[1.0; 8]).unwrap();
    assert_eq!(widened, real_to_complex(&[1.0; 8]));
    assert_eq!(plan.to_complex(&[1.0; 4]), Err(FftError::SizeMismatch));
}

#[test]
fn test_complete_spectrum() {
    let plan = FftPlan::new(8).unwrap();
    let mut spectrum = vec![
        10.0, 0.5, // DC
        1.0, 2.0,
        3.0, 4.0,
        5.0, 6.0,
        7.0, 8.0, // Nyquist
        0.0, 0.0,
        0.0, 0.0,
        0.0, 0.0,
    ];
    plan.complete_spectrum(&mut spectrum).unwrap();

    assert_eq!(
        spectrum,
        vec![
            10.0, 0.5,
            1.0, 2.0,
            3.0, 4.0,
            5.0, 6.0,
            7.0, 8.0,
            5.0, -6.0,
            3.0, -4.0,
            1.0, -2.0,
        ]
    );
}

#[test]
fn test_complete_spectrum_size_mismatch() {
    let plan = FftPlan::new(4).unwrap();
    let mut spectrum = vec![1.0; 6];
    assert_eq!(plan.complete_spectrum(&mut spectrum), Err(FftError::SizeMismatch));
    assert_eq!(spectrum, vec![1.0; 6]);
}
