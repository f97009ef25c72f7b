use crate::intent::classify_intent;
use crate::models::Intent;

pub const FAREWELL: &str = "Goodbye! Chat history is saved in chat_history.txt.";

pub fn reply_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Empty => "Please type something about admission, fees, hostel, courses, etc.",
        Intent::Greeting => {
            "Hi! I am your PROJECT 1 college info chatbot. \
             You can ask about admission, fees, courses, hostel, placements, scholarships, etc."
        }
        Intent::Help => {
            "I can answer questions about:\n\
             - admission / applying / registration\n\
             - courses and branches\n\
             - fees and scholarships\n\
             - hostel and campus facilities\n\
             - placements and internships\n\
             Just type a keyword like 'admission', 'fees', 'hostel', 'placement', 'scholarship' etc."
        }
        Intent::HowAreYou => {
            "I'm running perfectly for your internship project! How are you doing?"
        }
        Intent::Thanks => "You're welcome! 😊",
        Intent::WhoAreYou => {
            "I am a simple rule-based chatbot created as your AI internship Project 1."
        }
        Intent::Admission => {
            "The admission process usually includes:\n\
             1) Filling the online/offline application form\n\
             2) Appearing for the entrance exam / counseling (if required)\n\
             3) Submitting documents for verification\n\
             4) Paying the initial admission fee.\n\
             For exact dates and requirements, please check the official college website."
        }
        Intent::Courses => {
            "Common courses offered include B.Tech (various branches), BCA, BBA, MBA and more.\n\
             Different colleges may have branches like CSE, IT, ECE, ME, CE, etc.\n\
             Check the course list on the college website for exact details."
        }
        Intent::Fees => {
            "The fee structure depends on the course and year.\n\
             Generally, there are tuition fees, exam fees, and hostel fees (if applicable).\n\
             For the latest and accurate fee details, refer to the official fee structure or admission brochure."
        }
        Intent::Hostel => {
            "Many colleges provide hostel facilities with separate hostels for boys and girls.\n\
             Hostels often include mess, Wi-Fi, security, and basic facilities.\n\
             You should contact the hostel office or see the website for room availability and charges."
        }
        Intent::Scholarship => {
            "Scholarships are usually available based on merit, category, or government schemes.\n\
             Students can also apply for state and central government scholarships.\n\
             Contact the scholarship or accounts section for eligibility and application procedure."
        }
        Intent::Placements => {
            "The training and placement cell helps students with internships and final placements.\n\
             Companies visit the campus for recruitment drives, offering various job roles and packages.\n\
             You can check the college placement report or talk to the T&P cell for more details."
        }
        Intent::Internships => {
            "Internships are an important part of practical learning.\n\
             Students are encouraged to do internships in companies during semester breaks.\n\
             The placement cell / department often shares internship opportunities and guides students on how to apply."
        }
        Intent::Campus => {
            "Most college campuses include classrooms, labs, libraries, hostels, sports grounds, canteen, and Wi-Fi.\n\
             Facilities vary from college to college, so it’s best to check the official website or visit the campus."
        }
        Intent::Library => {
            "The college library generally provides textbooks, reference books, journals, and a quiet reading area.\n\
             Students can issue books using their library card or ID as per the library rules."
        }
        Intent::Canteen => {
            "The campus canteen / mess provides meals and snacks for students.\n\
             Quality and variety of food may differ, but basic veg and non-veg options are usually available."
        }
        Intent::Timing => {
            "College and office timings are usually from morning to afternoon.\n\
             For exact timings, please check the notice, website, or contact the college office."
        }
        Intent::Contact => {
            "You can contact the college through the official phone number, email, \
             or contact form given on the website.\n\
             Look for the 'Contact Us' page on the official site."
        }
        Intent::Fallback => {
            "I'm not sure about that.\n\
             Try asking using small keywords like:\n\
             - admission / apply\n\
             - courses / branches\n\
             - fees / scholarship\n\
             - hostel / campus\n\
             - placement / internship\n\
             - library / canteen / contact."
        }
    }
}

/// Classifies free text and returns the canned reply. Total over all input.
pub fn respond(input: &str) -> &'static str {
    reply_for(classify_intent(input))
}
