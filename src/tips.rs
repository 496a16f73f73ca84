pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIPS: [Tip; 7] = [
    Tip {
        title: "1. Change Small Habits",
        body: "Swapping a small habit, like skipping the daily coffee run, adds up over time. \
               Every rupiah saved is a step closer to your financial goals.",
    },
    Tip {
        title: "2. Saving for the Future",
        body: "Saving is not only about spending less but about putting time and money toward \
               a better future. Picture your goals and how this change gets you there.",
    },
    Tip {
        title: "3. Track Your Spending",
        body: "Watch where your daily money goes. A budget or a finance app shows which \
               expenses you can cut.",
    },
    Tip {
        title: "4. Save Regularly",
        body: "Set aside some money every month, even a small amount. Regular saving builds \
               an emergency fund without feeling like a burden.",
    },
    Tip {
        title: "5. Invest for the Future",
        body: "Investing grows wealth over the long run. Learn about stocks, mutual funds and \
               property, and pick what matches your risk profile.",
    },
    Tip {
        title: "6. Avoid Consumer Debt",
        body: "Credit cards and loans for things you do not need make your finances worse. \
               Focus on savings and investment instead.",
    },
    Tip {
        title: "7. Shop Wisely",
        body: "Ask whether you really need what you buy. Only buy things with lasting value \
               and skip impulse purchases.",
    },
];
