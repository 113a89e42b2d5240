mod feedback_tests;
mod home_tests;
mod inputs_tests;
mod predict_tests;
